use serde::{Deserialize, Serialize};

/// Top-level tab shown to the user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Home,
    About,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    Blue,
    Purple,
    Green,
    #[default]
    System,
}

impl Theme {
    pub const ALL: [Theme; 6] = [
        Theme::Light,
        Theme::Dark,
        Theme::Blue,
        Theme::Purple,
        Theme::Green,
        Theme::System,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
            Theme::Blue => "Blue",
            Theme::Purple => "Purple",
            Theme::Green => "Green",
            Theme::System => "System",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn themes_use_lowercase_names() {
        let names: Vec<String> = Theme::ALL
            .iter()
            .map(|t| serde_json::to_value(t).unwrap().as_str().unwrap().to_owned())
            .collect();
        assert_eq!(names, ["light", "dark", "blue", "purple", "green", "system"]);
    }

    #[test]
    fn unknown_theme_is_refused() {
        assert!(serde_json::from_str::<Theme>("\"sepia\"").is_err());
    }

    #[test]
    fn view_defaults_to_home() {
        assert_eq!(ViewMode::default(), ViewMode::Home);
        assert_eq!(
            serde_json::from_str::<ViewMode>("\"about\"").unwrap(),
            ViewMode::About
        );
    }
}
