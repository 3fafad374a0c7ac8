use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub i64);
    };
}

id_newtype!(ExperienceId);
id_newtype!(SkillId);
id_newtype!(ProjectCardId);
id_newtype!(NewsItemId);
id_newtype!(ProjectId);

/// Upper bound of the documented 0-100 rating domain.
pub const MAX_RATING: u8 = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: ExperienceId,
    pub company: String,
    pub role: String,
    pub period: String,
    pub rating: u8,
    pub highlights: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Declared position. Navigation uses the position in the containing
    /// sequence instead.
    pub index: usize,
}

impl Experience {
    pub fn rating_in_range(&self) -> bool {
        self.rating <= MAX_RATING
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    Frontend,
    Backend,
    Tools,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub id: SkillId,
    pub name: String,
    pub rating: u8,
    pub category: SkillCategory,
}

impl Skill {
    pub fn rating_in_range(&self) -> bool {
        self.rating <= MAX_RATING
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectCard {
    pub id: ProjectCardId,
    pub title: String,
    pub metric: String,
    pub color: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    pub id: NewsItemId,
    pub title: String,
    pub description: String,
    pub detail: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub period: String,
    pub link: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn experience_uses_camel_case_and_omits_missing_image() {
        let experience = Experience {
            id: ExperienceId(1),
            company: "Acme".into(),
            role: "Engineer".into(),
            period: "2020 - 2021".into(),
            rating: 90,
            highlights: vec!["shipped".into()],
            image_url: None,
            index: 0,
        };
        let value = serde_json::to_value(&experience).expect("json");
        assert_eq!(value["id"], 1);
        assert!(value.get("imageUrl").is_none());

        let with_image = Experience {
            image_url: Some("https://example.com/a.png".into()),
            ..experience
        };
        let value = serde_json::to_value(&with_image).expect("json");
        assert_eq!(value["imageUrl"], "https://example.com/a.png");
    }

    #[test]
    fn skill_category_is_lowercase_on_the_wire() {
        let skill: Skill = serde_json::from_str(
            r#"{"id":5,"name":"Node.js","rating":85,"category":"backend"}"#,
        )
        .expect("skill");
        assert_eq!(skill.category, SkillCategory::Backend);
        assert!(skill.rating_in_range());
    }

    #[test]
    fn rating_above_hundred_is_out_of_range() {
        let skill = Skill {
            id: SkillId(1),
            name: "x".into(),
            rating: 101,
            category: SkillCategory::Other,
        };
        assert!(!skill.rating_in_range());
    }
}
