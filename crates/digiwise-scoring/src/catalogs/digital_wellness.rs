use digiwise_core::models::question::{Category, DEFAULT_MAX_VALUE, Question};

use crate::Catalog;

/// DigiWise Digital Wellness questionnaire.
/// Five categories, four items each, rated 0 (never) to 4 (always).
/// Higher ratings indicate less healthy technology use.
pub struct DigitalWellness;

impl Catalog for DigitalWellness {
    fn id(&self) -> &str {
        "digital_wellness"
    }

    fn name(&self) -> &str {
        "DigiWise Digital Wellness Assessment"
    }

    fn categories(&self) -> &[Category] {
        static CATEGORIES: std::sync::LazyLock<Vec<Category>> = std::sync::LazyLock::new(|| {
            vec![
                category("social-media", "Social Media", "Compulsive checking and comparison"),
                category("screen-time", "Screen Time", "Daily device usage and self-control"),
                category("sleep", "Sleep", "Device use around bedtime"),
                category("productivity", "Productivity", "Focus and digital distraction"),
                category("wellbeing", "Wellbeing", "Mood and relationships affected by devices"),
            ]
        });
        &CATEGORIES
    }

    fn questions(&self) -> &[Question] {
        static QUESTIONS: std::sync::LazyLock<Vec<Question>> = std::sync::LazyLock::new(|| {
            let items = [
                ("social-media", "I check social media as soon as I wake up."),
                ("social-media", "I feel anxious when I cannot check my notifications."),
                ("social-media", "I compare my life to what others post online."),
                ("social-media", "I scroll feeds longer than I intended."),
                ("screen-time", "My daily screen time exceeds what I consider healthy."),
                ("screen-time", "I reach for my phone when I have a spare moment."),
                ("screen-time", "I have tried and failed to reduce my screen time."),
                ("screen-time", "I lose track of time while using my devices."),
                ("sleep", "I use my phone in bed before going to sleep."),
                ("sleep", "Device use delays the time I fall asleep."),
                ("sleep", "I check my phone if I wake up during the night."),
                ("sleep", "I feel tired during the day because of late-night device use."),
                ("productivity", "Notifications interrupt my work or study."),
                ("productivity", "I switch to unrelated apps while working."),
                ("productivity", "I postpone tasks because I am browsing online."),
                ("productivity", "I find it hard to focus without checking my phone."),
                ("wellbeing", "My mood depends on online interactions."),
                ("wellbeing", "I neglect in-person time with others because of devices."),
                ("wellbeing", "I feel restless when I am away from my devices."),
                ("wellbeing", "People close to me comment on my device use."),
            ];

            items
                .iter()
                .zip(1u32..)
                .map(|((category, prompt), id)| {
                    Question::new(id, category, prompt, DEFAULT_MAX_VALUE)
                })
                .collect()
        });
        &QUESTIONS
    }
}

fn category(id: &str, name: &str, description: &str) -> Category {
    Category {
        id: id.to_string(),
        name: name.to_string(),
        description: Some(description.to_string()),
    }
}
