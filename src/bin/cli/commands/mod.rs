pub mod achievements;
pub mod complete;
pub mod lesson;
pub mod modules;
pub mod reset;
pub mod score;
pub mod settings;
pub mod status;
pub mod unlock;
