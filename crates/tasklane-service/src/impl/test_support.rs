//! In-memory mock repositories shared by the service impl tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use tasklane_core::{
    Page, PageRequest, Project, ProjectId, SortDirection, Task, TaskFilter, TaskId,
    TasklaneResult, User, UserId,
};
use tasklane_repository::{ProjectRepository, TaskRepository, UserRepository};

pub(crate) struct MockUserRepository {
    users: Mutex<HashMap<UserId, User>>,
}

impl MockUserRepository {
    pub(crate) fn new() -> Self {
        Self {
            users: Mutex::new(HashMap::new()),
        }
    }

    pub(crate) fn with_user(user: User) -> Self {
        Self::with_users(vec![user])
    }

    pub(crate) fn with_users(users: Vec<User>) -> Self {
        let repo = Self::new();
        for user in users {
            repo.users.lock().unwrap().insert(user.id, user);
        }
        repo
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_by_email(&self, email: &str) -> TasklaneResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .find(|u| u.email.as_str().eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn exists_by_email(&self, email: &str) -> TasklaneResult<bool> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .any(|u| u.email.as_str().eq_ignore_ascii_case(email)))
    }

    async fn save(&self, user: &User) -> TasklaneResult<User> {
        self.users.lock().unwrap().insert(user.id, user.clone());
        Ok(user.clone())
    }
}

pub(crate) struct MockProjectRepository {
    projects: Mutex<HashMap<ProjectId, Project>>,
}

impl MockProjectRepository {
    pub(crate) fn new() -> Self {
        Self {
            projects: Mutex::new(HashMap::new()),
        }
    }

    pub(crate) fn with_projects(projects: Vec<Project>) -> Self {
        let repo = Self::new();
        for project in projects {
            repo.projects.lock().unwrap().insert(project.id, project);
        }
        repo
    }
}

#[async_trait]
impl ProjectRepository for MockProjectRepository {
    async fn save(&self, project: &Project) -> TasklaneResult<Project> {
        self.projects
            .lock()
            .unwrap()
            .insert(project.id, project.clone());
        Ok(project.clone())
    }

    async fn find_by_user(&self, user_id: UserId) -> TasklaneResult<Vec<Project>> {
        let mut projects: Vec<Project> = self
            .projects
            .lock()
            .unwrap()
            .values()
            .filter(|p| p.user_id == user_id)
            .cloned()
            .collect();
        projects.sort_by_key(|p| p.id.into_inner());
        Ok(projects)
    }

    async fn find_by_user_paginated(
        &self,
        user_id: UserId,
        page: PageRequest,
    ) -> TasklaneResult<Page<Project>> {
        let mut projects = self.find_by_user(user_id).await?;
        if page.sort.direction == SortDirection::Desc {
            projects.reverse();
        }

        let total = projects.len() as u64;
        let start = page.offset();
        let end = std::cmp::min(start + page.limit(), projects.len());
        let items = if start < projects.len() {
            projects[start..end].to_vec()
        } else {
            vec![]
        };
        Ok(Page::new(items, page.page, page.size, total))
    }

    async fn find_by_id_and_user(
        &self,
        id: ProjectId,
        user_id: UserId,
    ) -> TasklaneResult<Option<Project>> {
        Ok(self
            .projects
            .lock()
            .unwrap()
            .get(&id)
            .filter(|p| p.user_id == user_id)
            .cloned())
    }
}

pub(crate) struct MockTaskRepository {
    tasks: Mutex<HashMap<TaskId, Task>>,
}

impl MockTaskRepository {
    pub(crate) fn new() -> Self {
        Self {
            tasks: Mutex::new(HashMap::new()),
        }
    }

    pub(crate) fn add_task(&self, task: Task) {
        self.tasks.lock().unwrap().insert(task.id, task);
    }
}

#[async_trait]
impl TaskRepository for MockTaskRepository {
    async fn save(&self, task: &Task) -> TasklaneResult<Task> {
        self.tasks.lock().unwrap().insert(task.id, task.clone());
        Ok(task.clone())
    }

    async fn update(&self, task: &Task) -> TasklaneResult<Task> {
        self.tasks.lock().unwrap().insert(task.id, task.clone());
        Ok(task.clone())
    }

    async fn find_by_id(&self, id: TaskId) -> TasklaneResult<Option<Task>> {
        Ok(self.tasks.lock().unwrap().get(&id).cloned())
    }

    async fn find_by_project(&self, project_id: ProjectId) -> TasklaneResult<Vec<Task>> {
        let mut tasks: Vec<Task> = self
            .tasks
            .lock()
            .unwrap()
            .values()
            .filter(|t| t.project_id == project_id)
            .cloned()
            .collect();
        tasks.sort_by_key(|t| t.id.into_inner());
        Ok(tasks)
    }

    async fn find_by_project_paginated(
        &self,
        project_id: ProjectId,
        filter: TaskFilter,
        page: PageRequest,
    ) -> TasklaneResult<Page<Task>> {
        let mut tasks: Vec<Task> = self
            .find_by_project(project_id)
            .await?
            .into_iter()
            .filter(|t| match &filter.title {
                Some(needle) => t.title.to_lowercase().contains(&needle.to_lowercase()),
                None => true,
            })
            .filter(|t| match filter.completed {
                Some(completed) => t.completed == completed,
                None => true,
            })
            .collect();
        if page.sort.direction == SortDirection::Desc {
            tasks.reverse();
        }

        let total = tasks.len() as u64;
        let start = page.offset();
        let end = std::cmp::min(start + page.limit(), tasks.len());
        let items = if start < tasks.len() {
            tasks[start..end].to_vec()
        } else {
            vec![]
        };
        Ok(Page::new(items, page.page, page.size, total))
    }

    async fn delete(&self, id: TaskId) -> TasklaneResult<bool> {
        Ok(self.tasks.lock().unwrap().remove(&id).is_some())
    }

    async fn count_by_project(&self, project_id: ProjectId) -> TasklaneResult<u64> {
        Ok(self
            .tasks
            .lock()
            .unwrap()
            .values()
            .filter(|t| t.project_id == project_id)
            .count() as u64)
    }

    async fn count_completed_by_project(&self, project_id: ProjectId) -> TasklaneResult<u64> {
        Ok(self
            .tasks
            .lock()
            .unwrap()
            .values()
            .filter(|t| t.project_id == project_id && t.completed)
            .count() as u64)
    }
}
