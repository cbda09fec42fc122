//! Advisory rule table - Ordered keyword sets and their canned guidance.

use serde::{Deserialize, Serialize};

/// Topic of a canned advisory response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdvisoryTopic {
    Irrigation,
    Fertilizer,
    PestManagement,
    SoilHealth,
    Cardiovascular,
    BloodPressure,
    Cholesterol,
    CropSelection,
    Weather,
    Yield,
    Acknowledgment,
}

impl AdvisoryTopic {
    /// Returns the display label for this topic.
    pub fn label(&self) -> &'static str {
        match self {
            AdvisoryTopic::Irrigation => "Irrigation",
            AdvisoryTopic::Fertilizer => "Fertilizer",
            AdvisoryTopic::PestManagement => "Pest Management",
            AdvisoryTopic::SoilHealth => "Soil Health",
            AdvisoryTopic::Cardiovascular => "Cardiovascular",
            AdvisoryTopic::BloodPressure => "Blood Pressure",
            AdvisoryTopic::Cholesterol => "Cholesterol",
            AdvisoryTopic::CropSelection => "Crop Selection",
            AdvisoryTopic::Weather => "Weather",
            AdvisoryTopic::Yield => "Yield",
            AdvisoryTopic::Acknowledgment => "Acknowledgment",
        }
    }
}

/// A keyword set paired with the response it triggers.
///
/// Keywords are lowercase and matched as plain substrings of the
/// lowercased query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordRule {
    pub topic: AdvisoryTopic,
    pub keywords: &'static [&'static str],
    pub response: &'static str,
}

impl KeywordRule {
    /// True when any keyword occurs in an already-lowercased query.
    pub fn matches(&self, lowered_query: &str) -> bool {
        self.keywords.iter().any(|kw| lowered_query.contains(kw))
    }
}

/// Opening message of every chat conversation.
pub const GREETING: &str = "Hello! I'm your Smart Farm AI Assistant. I can help explain recommendations, answer questions about farming practices, and provide guidance on crop management. How can I assist you today?";

/// Advisory rules in evaluation order. The first match wins, so order is
/// part of the contract: keyword sets overlap ("water" vs "thank",
/// "heart" vs "cholesterol").
pub const ADVISORY_RULES: &[KeywordRule] = &[
    KeywordRule {
        topic: AdvisoryTopic::Irrigation,
        keywords: &["irrigation", "water"],
        response: "For irrigation management, I recommend monitoring soil moisture levels regularly. Water when soil moisture drops below 30% for most crops. Consider drip irrigation for water efficiency and ensure proper drainage to prevent waterlogging.",
    },
    KeywordRule {
        topic: AdvisoryTopic::Fertilizer,
        keywords: &["fertilizer", "nutrient"],
        response: "Fertilizer application depends on your crop type and growth stage. For nitrogen-hungry crops like corn, apply 120-150kg/hectare of nitrogen. Always soil test first and follow the 4R principles: Right source, Right rate, Right time, Right place.",
    },
    KeywordRule {
        topic: AdvisoryTopic::PestManagement,
        keywords: &["disease", "pest"],
        response: "Early detection is key for disease and pest management. Look for yellowing leaves, spots, or unusual growth patterns. Implement integrated pest management (IPM) strategies including crop rotation, beneficial insects, and targeted treatments when necessary.",
    },
    KeywordRule {
        topic: AdvisoryTopic::SoilHealth,
        keywords: &["soil", "ph"],
        response: "Soil health is fundamental to successful farming. Maintain soil pH between 6.0-7.0 for most crops. Regular soil testing helps determine nutrient needs. Consider cover crops and organic matter to improve soil structure and fertility.",
    },
    KeywordRule {
        topic: AdvisoryTopic::Cardiovascular,
        keywords: &["heart", "cardiovascular", "cad"],
        response: "Cardiovascular health assessment considers multiple risk factors including age, blood pressure, cholesterol levels, and lifestyle factors. Regular monitoring and preventive care are essential for maintaining heart health.",
    },
    KeywordRule {
        topic: AdvisoryTopic::BloodPressure,
        keywords: &["blood pressure", "bp"],
        response: "Normal blood pressure is typically below 120/80 mmHg. Elevated readings may indicate hypertension, which is a significant risk factor for cardiovascular disease. Lifestyle modifications and regular monitoring are important.",
    },
    KeywordRule {
        topic: AdvisoryTopic::Cholesterol,
        keywords: &["cholesterol"],
        response: "Total cholesterol levels should ideally be below 200 mg/dL. Higher levels increase cardiovascular risk. Diet, exercise, and sometimes medication can help manage cholesterol levels effectively.",
    },
    KeywordRule {
        topic: AdvisoryTopic::CropSelection,
        keywords: &["crop", "plant"],
        response: "Crop selection should consider your local climate, soil conditions, and market demand. Diversification can reduce risk and improve soil health. Always follow recommended planting dates and spacing for optimal yields.",
    },
    KeywordRule {
        topic: AdvisoryTopic::Weather,
        keywords: &["weather", "climate"],
        response: "Weather monitoring is crucial for farming decisions. Check forecasts regularly for irrigation, spraying, and harvesting timing. Climate-smart agriculture practices help adapt to changing weather patterns.",
    },
    KeywordRule {
        topic: AdvisoryTopic::Yield,
        keywords: &["yield", "production"],
        response: "Maximizing yield requires balancing multiple factors: proper nutrition, adequate water, pest control, and optimal growing conditions. Focus on soil health and precise timing of inputs for best results.",
    },
    KeywordRule {
        topic: AdvisoryTopic::Acknowledgment,
        keywords: &["thank", "thanks"],
        response: "You're welcome! I'm here to help with any agriculture or healthcare questions you have. Feel free to ask about specific crops, farming techniques, or health assessments anytime.",
    },
];

/// Fallback prompts used when no rule matches.
pub const DEFAULT_PROMPTS: [&str; 4] = [
    "I'd be happy to help! Could you provide more specific details about your farming situation or health assessment needs?",
    "That's an interesting question! For the best advice, could you tell me more about your specific crop type, growing conditions, or health parameters?",
    "I can assist with both agricultural decision support and health risk assessments. What specific area would you like guidance on?",
    "Based on the data you've provided to the system, I can offer more targeted recommendations. What aspect would you like me to focus on?",
];
