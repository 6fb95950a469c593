use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use tracing::{info, instrument, warn};

use super::{Department, Faculty, ReferenceDataError, ReferenceDataSource, ReferenceResult};

/// Reference data served by a remote lookup service
///
/// Expects `GET {base}/faculties` and `GET {base}/faculties/{id}/departments`,
/// both returning JSON arrays.
#[derive(Clone)]
pub struct HttpReferenceData {
    pub(crate) http_client: Client,
    base_url: String,
}

impl HttpReferenceData {
    pub fn new(base_url: &str) -> Self {
        Self {
            http_client: Client::new(),
            base_url: base_url.to_string(),
        }
    }

    pub fn faculties_url(&self) -> ReferenceResult<Url> {
        self.endpoint(&["faculties"])
    }

    pub fn departments_url(&self, faculty_id: &str) -> ReferenceResult<Url> {
        self.endpoint(&["faculties", faculty_id, "departments"])
    }

    fn endpoint(&self, segments: &[&str]) -> ReferenceResult<Url> {
        let invalid = || ReferenceDataError::InvalidUrl {
            url: self.base_url.clone(),
        };

        let mut url = Url::parse(&self.base_url).map_err(|_| invalid())?;
        url.path_segments_mut()
            .map_err(|_| invalid())?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_list<T: serde::de::DeserializeOwned>(&self, url: Url) -> ReferenceResult<Vec<T>> {
        let response = self
            .http_client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| ReferenceDataError::Network {
                message: format!("Failed to call {}: {}", url, e),
            })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(Vec::new());
        }
        if !status.is_success() {
            warn!("Reference data request to {} failed with {}", url, status);
            return Err(ReferenceDataError::Status {
                status: status.as_u16(),
            });
        }

        response
            .json::<Vec<T>>()
            .await
            .map_err(|e| ReferenceDataError::Decode {
                message: e.to_string(),
            })
    }
}

#[async_trait(?Send)]
impl ReferenceDataSource for HttpReferenceData {
    #[instrument(skip(self), err)]
    async fn list_faculties(&self) -> ReferenceResult<Vec<Faculty>> {
        let faculties: Vec<Faculty> = self.get_list(self.faculties_url()?).await?;
        info!("Loaded {} faculties", faculties.len());
        Ok(faculties)
    }

    #[instrument(skip(self), err)]
    async fn list_departments(&self, faculty_id: &str) -> ReferenceResult<Vec<Department>> {
        if faculty_id.is_empty() {
            return Ok(Vec::new());
        }

        let departments: Vec<Department> =
            self.get_list(self.departments_url(faculty_id)?).await?;
        info!(
            "Loaded {} departments for faculty {}",
            departments.len(),
            faculty_id
        );

        // A misbehaving service must not leak another faculty's departments
        Ok(departments
            .into_iter()
            .filter(|department| department.faculty_id == faculty_id)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_join_base_path() {
        let source = HttpReferenceData::new("https://api.example.edu/reference/");

        assert_eq!(
            source.faculties_url().unwrap().as_str(),
            "https://api.example.edu/reference/faculties"
        );
        assert_eq!(
            source.departments_url("3").unwrap().as_str(),
            "https://api.example.edu/reference/faculties/3/departments"
        );
    }

    #[test]
    fn test_faculty_id_is_a_single_segment() {
        let source = HttpReferenceData::new("https://api.example.edu");

        let url = source.departments_url("a/b").unwrap();
        assert_eq!(url.path(), "/faculties/a%2Fb/departments");
    }

    #[test]
    fn test_relative_base_is_rejected() {
        let source = HttpReferenceData::new("/reference");

        assert_eq!(
            source.faculties_url(),
            Err(ReferenceDataError::InvalidUrl {
                url: "/reference".to_string()
            })
        );
    }

    #[tokio::test]
    async fn test_empty_faculty_skips_request() {
        // Unroutable base: any request would fail, so success proves no call was made
        let source = HttpReferenceData::new("http://127.0.0.1:9");

        assert_eq!(source.list_departments("").await, Ok(Vec::new()));
    }
}
