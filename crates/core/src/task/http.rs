//! HTTP task service
//!
//! Talks to a JSON todo API (`/todos`, `/todos/:id`) with reqwest.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::debug;

use super::model::Task;
use super::service::TaskService;
use crate::config::ServiceConfig;
use crate::{Error, Result};

/// Task service backed by a remote REST collection
pub struct HttpTaskService {
    client: Client,
    config: ServiceConfig,
}

impl HttpTaskService {
    /// Create a new service for the configured endpoint
    pub fn new(config: ServiceConfig) -> Self {
        Self {
            client: Client::builder().build().unwrap_or_else(|_| Client::new()),
            config,
        }
    }
}

#[async_trait]
impl TaskService for HttpTaskService {
    async fn list(&self) -> Result<Vec<Task>> {
        let url = &self.config.base_url;
        debug!("GET {}", url);

        let tasks = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<Task>>()
            .await?;

        debug!("Fetched {} tasks", tasks.len());
        Ok(tasks)
    }

    async fn get(&self, id: u64) -> Result<Task> {
        let url = self.config.task_url(id);
        debug!("GET {}", url);

        let res = self.client.get(&url).send().await?;
        if res.status() == StatusCode::NOT_FOUND {
            return Err(Error::TaskNotFound(id));
        }

        Ok(res.error_for_status()?.json::<Task>().await?)
    }

    async fn create(&self, task: &Task) -> Result<Task> {
        let url = &self.config.base_url;
        debug!("POST {}", url);

        let created = self
            .client
            .post(url)
            .json(task)
            .send()
            .await?
            .error_for_status()?
            .json::<Task>()
            .await?;

        Ok(created)
    }

    async fn update(&self, id: u64, task: &Task) -> Result<Task> {
        let url = self.config.task_url(id);
        debug!("PUT {}", url);

        let updated = self
            .client
            .put(&url)
            .json(task)
            .send()
            .await?
            .error_for_status()?
            .json::<Task>()
            .await?;

        Ok(updated)
    }

    async fn delete(&self, id: u64) -> Result<()> {
        let url = self.config.task_url(id);
        debug!("DELETE {}", url);

        self.client.delete(&url).send().await?.error_for_status()?;
        Ok(())
    }
}
