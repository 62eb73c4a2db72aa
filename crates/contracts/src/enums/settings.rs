use serde::{Deserialize, Serialize};

/// When bacterial readings raise an alert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BacterialThreshold {
    AnyDetection,
    HighLevels,
    CriticalLevels,
}

impl BacterialThreshold {
    pub fn code(&self) -> &'static str {
        match self {
            BacterialThreshold::AnyDetection => "any_detection",
            BacterialThreshold::HighLevels => "high_levels",
            BacterialThreshold::CriticalLevels => "critical_levels",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            BacterialThreshold::AnyDetection => "Any Detection",
            BacterialThreshold::HighLevels => "High Levels Only",
            BacterialThreshold::CriticalLevels => "Critical Levels Only",
        }
    }

    pub fn all() -> Vec<BacterialThreshold> {
        vec![
            BacterialThreshold::AnyDetection,
            BacterialThreshold::HighLevels,
            BacterialThreshold::CriticalLevels,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "any_detection" => Some(BacterialThreshold::AnyDetection),
            "high_levels" => Some(BacterialThreshold::HighLevels),
            "critical_levels" => Some(BacterialThreshold::CriticalLevels),
            _ => None,
        }
    }
}

/// SMS gateway provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SmsProvider {
    Twilio,
    AwsSns,
    Textlocal,
}

impl SmsProvider {
    pub fn code(&self) -> &'static str {
        match self {
            SmsProvider::Twilio => "twilio",
            SmsProvider::AwsSns => "aws-sns",
            SmsProvider::Textlocal => "textlocal",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SmsProvider::Twilio => "Twilio",
            SmsProvider::AwsSns => "AWS SNS",
            SmsProvider::Textlocal => "TextLocal",
        }
    }

    pub fn all() -> Vec<SmsProvider> {
        vec![SmsProvider::Twilio, SmsProvider::AwsSns, SmsProvider::Textlocal]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "twilio" => Some(SmsProvider::Twilio),
            "aws-sns" => Some(SmsProvider::AwsSns),
            "textlocal" => Some(SmsProvider::Textlocal),
            _ => None,
        }
    }
}

/// Weather data provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherProvider {
    OpenWeather,
    WeatherApi,
    Imd,
}

impl WeatherProvider {
    pub fn code(&self) -> &'static str {
        match self {
            WeatherProvider::OpenWeather => "openweather",
            WeatherProvider::WeatherApi => "weatherapi",
            WeatherProvider::Imd => "imd",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            WeatherProvider::OpenWeather => "OpenWeatherMap",
            WeatherProvider::WeatherApi => "WeatherAPI",
            WeatherProvider::Imd => "IMD API",
        }
    }

    pub fn all() -> Vec<WeatherProvider> {
        vec![
            WeatherProvider::OpenWeather,
            WeatherProvider::WeatherApi,
            WeatherProvider::Imd,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "openweather" => Some(WeatherProvider::OpenWeather),
            "weatherapi" => Some(WeatherProvider::WeatherApi),
            "imd" => Some(WeatherProvider::Imd),
            _ => None,
        }
    }
}
