// src/view_models.rs

use crate::model::{Mode, SkillTag};

#[derive(Clone, Debug)]
pub struct LevelCard {
    pub id: usize,
    pub title: String,
    pub icon: String,
    pub mode: Mode,
    pub unlocked: bool,
    pub completed: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillBadge {
    pub skill: SkillTag,
    pub unlocked: bool,
}

impl LevelCard {
    pub fn label(&self) -> String {
        let status = if self.completed {
            "✅"
        } else if self.unlocked {
            "🔓"
        } else {
            "🔒"
        };
        format!("{} {}. {} {}", self.icon, self.id, self.title, status)
    }

    pub fn hover_text(&self) -> &'static str {
        if self.unlocked {
            self.mode.display_name()
        } else {
            "Complete the previous challenge to unlock"
        }
    }
}

impl SkillBadge {
    pub fn label(&self) -> String {
        if self.unlocked {
            format!("🏅 {}", self.skill.label())
        } else {
            format!("🔒 {}", self.skill.label())
        }
    }
}
