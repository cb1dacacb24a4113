// src/projects/models.rs

use serde::{Deserialize, Serialize};

// ============================================================================
// Project Analysis Models
// ============================================================================

#[derive(Debug, Serialize)]
pub struct AnalyseRequest {
    pub url: String,
}

/// Threat/SEO verdict for a project URL, computed server-side
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectAnalysis {
    #[serde(default)]
    pub is_safe: Option<bool>,
    #[serde(default)]
    pub threat: Option<serde_json::Value>,
    #[serde(default)]
    pub seo: Option<SeoStats>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeoStats {
    #[serde(default)]
    pub score: Option<f64>,
}

impl ProjectAnalysis {
    /// One-line rendering used by both the CLI command and the browser
    pub fn summary(&self) -> String {
        let safe = match self.is_safe {
            Some(true) => "Safe: Yes",
            Some(false) => "Safe: No",
            None => "Safe: unknown",
        };
        let seo = self
            .seo
            .as_ref()
            .and_then(|s| s.score)
            .map(|score| format!(", SEO score {}", score))
            .unwrap_or_default();
        let threat = self
            .threat
            .as_ref()
            .filter(|t| !t.is_null())
            .map(|t| format!(", threat: {}", t))
            .unwrap_or_default();
        format!("{}{}{}", safe, seo, threat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_summary() {
        let analysis: ProjectAnalysis = serde_json::from_str(
            r#"{"isSafe":true,"threat":null,"seo":{"score":91.0}}"#,
        )
        .expect("parse");
        assert_eq!(analysis.summary(), "Safe: Yes, SEO score 91");

        let flagged: ProjectAnalysis =
            serde_json::from_str(r#"{"isSafe":false,"threat":"phishing"}"#).expect("parse");
        assert_eq!(flagged.summary(), "Safe: No, threat: \"phishing\"");

        let empty: ProjectAnalysis = serde_json::from_str("{}").expect("parse");
        assert_eq!(empty.summary(), "Safe: unknown");
    }
}
