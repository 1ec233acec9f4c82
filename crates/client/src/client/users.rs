//! User API operations.

use uuid::Uuid;

use super::UserstoreClient;
use crate::error::Result;
use userstore_core::user::{
    CreateUserRequest, MessageResponse, UpdateUserRequest, User, UserResponse,
};

impl UserstoreClient {
    /// List all users.
    pub async fn list_users(&self) -> Result<Vec<User>> {
        let response = self.client.get(self.url("/users")).send().await?;
        self.handle_response(response).await
    }

    /// Create a new user.
    pub async fn create_user(&self, request: &CreateUserRequest) -> Result<UserResponse> {
        let response = self
            .client
            .post(self.url("/users"))
            .json(request)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Get user by UUID.
    pub async fn get_user(&self, uuid: Uuid) -> Result<User> {
        let response = self
            .client
            .get(self.url(&format!("/users/{}", uuid)))
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Update a user. Fields left as `None` are not sent.
    pub async fn update_user(
        &self,
        uuid: Uuid,
        request: &UpdateUserRequest,
    ) -> Result<UserResponse> {
        let response = self
            .client
            .put(self.url(&format!("/users/{}", uuid)))
            .json(request)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Delete user by UUID.
    pub async fn delete_user(&self, uuid: Uuid) -> Result<MessageResponse> {
        let response = self
            .client
            .delete(self.url(&format!("/users/{}", uuid)))
            .send()
            .await?;
        self.handle_response(response).await
    }
}
