use serde::{Deserialize, Serialize};

use super::{DisplayName, ImageUpload};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub name: String,
    #[serde(rename = "imageUrl", default)]
    pub image_url: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectList {
    #[serde(rename = "totalCount")]
    pub total_count: u32,
    pub projects: Vec<Project>,
}

impl ProjectList {
    pub fn validate_total_count(&self) -> Result<(), String> {
        if self.total_count as usize != self.projects.len() {
            return Err(format!(
                "totalCount is {} but the response carries {} projects",
                self.total_count,
                self.projects.len()
            ));
        }
        Ok(())
    }

    pub fn find(&self, id: i64) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }
}

#[derive(Debug)]
pub struct NewProject {
    pub name: DisplayName,
    pub description: Option<String>,
    pub image: ImageUpload,
}

#[derive(Debug)]
pub struct ProjectUpdate {
    pub name: DisplayName,
    pub description: Option<String>,
    pub image: Option<ImageUpload>,
}
