use serde::{Deserialize, Serialize};

use super::{DisplayName, ImageUpload};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Partner {
    pub id: i64,
    pub name: String,
    #[serde(rename = "logoUrl", default)]
    pub logo_url: String,
    #[serde(rename = "websiteUrl", default)]
    pub website_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartnerList {
    #[serde(rename = "totalCount")]
    pub total_count: u32,
    pub partners: Vec<Partner>,
}

impl PartnerList {
    pub fn validate_total_count(&self) -> Result<(), String> {
        if self.total_count as usize != self.partners.len() {
            return Err(format!(
                "totalCount is {} but the response carries {} partners",
                self.total_count,
                self.partners.len()
            ));
        }
        Ok(())
    }

    pub fn find(&self, id: i64) -> Option<&Partner> {
        self.partners.iter().find(|p| p.id == id)
    }
}

#[derive(Debug)]
pub struct NewPartner {
    pub name: DisplayName,
    pub website_url: Option<String>,
    pub logo: ImageUpload,
}

#[derive(Debug)]
pub struct PartnerUpdate {
    pub name: DisplayName,
    pub website_url: Option<String>,
    pub logo: Option<ImageUpload>,
}
