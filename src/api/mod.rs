//! REST helpers for the student-record service and the public JSONPlaceholder
//! posts feed. Nothing here is wired into the UI yet.

use serde::{Deserialize, Serialize};

use crate::configs::api_base_url;
use crate::error::ApiError;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// Payload for create/update calls; the service assigns the id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewStudent {
    pub name: String,
    pub email: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemotePost {
    pub user_id: i64,
    pub id: i64,
    pub title: String,
    pub body: String,
}

const POSTS_URL: &str = "https://jsonplaceholder.typicode.com/posts";

fn students_url(base: &str, id: Option<i64>) -> String {
    let base = base.trim_end_matches('/');
    match id {
        Some(id) => format!("{}/students/{}", base, id),
        None => format!("{}/students", base),
    }
}

async fn require_success(
    response: reqwest::Response,
    action: &str,
) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    log::error!("{} failed: HTTP {} ({})", action, status.as_u16(), body);
    Err(ApiError::Status(status.as_u16(), body))
}

pub async fn fetch_students() -> Result<Vec<Student>, ApiError> {
    let url = students_url(&api_base_url(), None);
    log::debug!("GET {}", url);
    let response = reqwest::get(&url).await?;
    let response = require_success(response, "fetch students").await?;
    Ok(response.json().await?)
}

pub async fn create_student(student: &NewStudent) -> Result<Student, ApiError> {
    let url = students_url(&api_base_url(), None);
    log::debug!("POST {}", url);
    let response = reqwest::Client::new().post(&url).json(student).send().await?;
    let response = require_success(response, "create student").await?;
    Ok(response.json().await?)
}

pub async fn update_student(id: i64, student: &NewStudent) -> Result<Student, ApiError> {
    log::info!("updating student {}", id);
    match serde_json::to_string(student) {
        Ok(payload) => log::debug!("student payload: {}", payload),
        Err(error) => log::debug!("student payload not loggable: {}", error),
    }

    let url = students_url(&api_base_url(), Some(id));
    let response = reqwest::Client::new().put(&url).json(student).send().await?;
    log::debug!("update response status: {}", response.status());

    let response = require_success(response, "update student").await?;
    Ok(response.json().await?)
}

pub async fn delete_student(id: i64) -> Result<(), ApiError> {
    let url = students_url(&api_base_url(), Some(id));
    log::debug!("DELETE {}", url);
    let response = reqwest::Client::new().delete(&url).send().await?;
    require_success(response, "delete student").await?;
    Ok(())
}

pub async fn fetch_posts() -> Result<Vec<RemotePost>, ApiError> {
    log::debug!("GET {}", POSTS_URL);
    let response = reqwest::get(POSTS_URL).await?;
    let response = require_success(response, "fetch posts").await?;
    Ok(response.json().await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn students_url_joins_cleanly() {
        assert_eq!(
            students_url("http://localhost:3001", None),
            "http://localhost:3001/students"
        );
        assert_eq!(
            students_url("http://localhost:3001/", None),
            "http://localhost:3001/students"
        );
        assert_eq!(
            students_url("https://records.example.edu", Some(7)),
            "https://records.example.edu/students/7"
        );
    }

    #[test]
    fn remote_post_decodes_camel_case() {
        let raw = r#"{"userId": 3, "id": 21, "title": "t", "body": "b"}"#;
        let post: RemotePost = serde_json::from_str(raw).expect("valid post JSON");
        assert_eq!(post.user_id, 3);
        assert_eq!(post.id, 21);
    }
}
