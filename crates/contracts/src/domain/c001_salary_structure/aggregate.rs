use serde::{Deserialize, Serialize};

// ============================================================================
// ID Types
// ============================================================================

/// Identifier of a salary structure, assigned by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StructureId(pub i64);

impl StructureId {
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for StructureId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a compensation component, assigned by the backend.
/// Components are re-created on every structure update, so the id is only
/// stable between writes of the owning structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentId(pub i64);

impl ComponentId {
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for ComponentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Enums
// ============================================================================

/// Country a structure applies to. Wire strings are the exact backend enum
/// values ("UAE", "KSA", "India").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Country {
    UAE,
    KSA,
    India,
}

impl Country {
    pub const ALL: [Country; 3] = [Country::UAE, Country::KSA, Country::India];

    pub fn as_str(&self) -> &'static str {
        match self {
            Country::UAE => "UAE",
            Country::KSA => "KSA",
            Country::India => "India",
        }
    }

    pub fn parse(s: &str) -> Option<Country> {
        Country::ALL.into_iter().find(|c| c.as_str() == s)
    }
}

impl std::fmt::Display for Country {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of a compensation line item. Serialized under the JSON key `type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    Earning,
    Deduction,
    Benefit,
}

impl ComponentKind {
    pub const ALL: [ComponentKind; 3] = [
        ComponentKind::Earning,
        ComponentKind::Deduction,
        ComponentKind::Benefit,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentKind::Earning => "earning",
            ComponentKind::Deduction => "deduction",
            ComponentKind::Benefit => "benefit",
        }
    }

    pub fn parse(s: &str) -> Option<ComponentKind> {
        ComponentKind::ALL.into_iter().find(|k| k.as_str() == s)
    }
}

impl std::fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Optional computation rule of a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleKind {
    Fixed,
    Percentage,
}

impl RuleKind {
    pub const ALL: [RuleKind; 2] = [RuleKind::Fixed, RuleKind::Percentage];

    pub fn as_str(&self) -> &'static str {
        match self {
            RuleKind::Fixed => "fixed",
            RuleKind::Percentage => "percentage",
        }
    }

    pub fn parse(s: &str) -> Option<RuleKind> {
        RuleKind::ALL.into_iter().find(|r| r.as_str() == s)
    }
}

impl std::fmt::Display for RuleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Read model
// ============================================================================

/// One line item of a salary structure, as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompensationComponent {
    pub id: ComponentId,
    pub name: String,

    #[serde(rename = "type")]
    pub kind: ComponentKind,

    #[serde(rename = "rule_type", default)]
    pub rule_kind: Option<RuleKind>,

    #[serde(default)]
    pub structure_id: Option<StructureId>,
}

/// A salary structure with its ordered component list.
///
/// Timestamps are kept as backend-formatted strings; the frontend formats
/// them for display only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryStructure {
    #[serde(default)]
    pub id: Option<StructureId>,
    pub name: String,
    pub country: Country,

    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,

    #[serde(default)]
    pub components: Vec<CompensationComponent>,
}

impl SalaryStructure {
    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    pub fn find_component(&self, id: ComponentId) -> Option<&CompensationComponent> {
        self.components.iter().find(|c| c.id == id)
    }
}

// ============================================================================
// Write model (create / full update)
// ============================================================================

/// Component payload for structure writes. Carries no id: the backend
/// assigns component ids on every write of the owning structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentDraft {
    pub name: String,

    #[serde(rename = "type")]
    pub kind: ComponentKind,

    #[serde(rename = "rule_type")]
    pub rule_kind: Option<RuleKind>,
}

impl Default for ComponentDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            kind: ComponentKind::Earning,
            rule_kind: Some(RuleKind::Fixed),
        }
    }
}

/// Body of POST /structures/ and PUT /structures/{id}.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructureDraft {
    pub name: String,
    pub country: Country,
    pub components: Vec<ComponentDraft>,
}

impl Default for StructureDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            country: Country::UAE,
            components: Vec::new(),
        }
    }
}

impl StructureDraft {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Structure name is required".into());
        }
        for (i, component) in self.components.iter().enumerate() {
            if component.name.trim().is_empty() {
                return Err(format!("Component #{} needs a name", i + 1));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn component_wire_shape_uses_type_and_rule_type_keys() {
        let draft = ComponentDraft {
            name: "Base".to_string(),
            kind: ComponentKind::Earning,
            rule_kind: Some(RuleKind::Fixed),
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "name": "Base", "type": "earning", "rule_type": "fixed" })
        );
    }

    #[test]
    fn country_round_trips_exact_backend_strings() {
        for country in Country::ALL {
            let json = serde_json::to_string(&country).unwrap();
            assert_eq!(json, format!("\"{}\"", country.as_str()));
            assert_eq!(Country::parse(country.as_str()), Some(country));
        }
        assert_eq!(Country::parse("india"), None);
    }

    #[test]
    fn structure_deserializes_from_backend_response() {
        let json = r#"{
            "id": 1,
            "name": "UAE Standard",
            "country": "UAE",
            "created_at": "2024-01-01 09:30:00",
            "components": [
                { "id": 10, "structure_id": 1, "name": "Base", "type": "earning", "rule_type": "fixed" },
                { "id": 11, "structure_id": 1, "name": "Housing", "type": "benefit", "rule_type": null }
            ]
        }"#;
        let s: SalaryStructure = serde_json::from_str(json).unwrap();
        assert_eq!(s.id, Some(StructureId(1)));
        assert_eq!(s.component_count(), 2);
        assert_eq!(s.components[1].rule_kind, None);
        assert!(s.find_component(ComponentId(11)).is_some());
        assert!(s.find_component(ComponentId(12)).is_none());
        assert!(s.updated_at.is_none());
    }

    #[test]
    fn draft_validation_requires_names() {
        let mut draft = StructureDraft {
            name: "KSA Standard".into(),
            country: Country::KSA,
            components: vec![ComponentDraft::default()],
        };
        assert!(draft.validate().is_err());

        draft.components[0].name = "Base".into();
        assert!(draft.validate().is_ok());

        draft.name = "  ".into();
        assert!(draft.validate().is_err());
    }
}
