//! Input normalizer: turns the loosely-typed request mapping into a `ProfileInput`.
//!
//! Nothing here fails. Missing, null, wrongly-typed or unparseable fields fall back
//! to their defaults so the service always answers, even for partial forms.

use serde_json::{Map, Value};

/// Strings accepted as "has work experience".
const WORKEX_TRUE_VALUES: &[&str] = &["yes", "y", "true", "t", "1", "experience", "exp"];

/// Self-reported competitive-programming tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CpLevel {
    None,
    Basic,
    Intermediate,
    Good,
    Strong,
    /// Any other value. Scores like `None` but is not treated as a weak signal.
    Unrecognized,
}

impl CpLevel {
    /// Case-insensitive, whitespace-tolerant parse.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "none" => CpLevel::None,
            "basic" => CpLevel::Basic,
            "intermediate" => CpLevel::Intermediate,
            "good" => CpLevel::Good,
            "strong" => CpLevel::Strong,
            _ => CpLevel::Unrecognized,
        }
    }

    /// `none` or `basic`: the levels that hurt online coding rounds.
    pub fn is_weak(self) -> bool {
        matches!(self, CpLevel::None | CpLevel::Basic)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SkillFlags {
    pub dsa: bool,
    pub web: bool,
    pub ml: bool,
    pub app: bool,
    pub cloud: bool,
}

/// Fully-typed student profile. Built once per request, never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileInput {
    pub ssc_p: f64,
    pub hsc_p: f64,
    pub degree_p: f64,
    pub etest_p: f64,
    pub workex: bool,
    pub cp_level: CpLevel,
    pub skills: SkillFlags,
    pub projects: i64,
    pub internships: i64,
    pub hackathons: i64,
    pub clubs: i64,
    /// Secondary (MBA) percentage, only when the client sent one.
    pub mba_p: Option<f64>,
}

impl ProfileInput {
    pub fn from_fields(fields: &Map<String, Value>) -> Self {
        let mba_p = match fields.get("mba_p") {
            None | Some(Value::Null) => None,
            Some(v) => Some(coerce_f64(Some(v), 0.0)),
        };

        ProfileInput {
            ssc_p: coerce_f64(fields.get("ssc_p"), 0.0),
            hsc_p: coerce_f64(fields.get("hsc_p"), 0.0),
            degree_p: coerce_f64(fields.get("degree_p"), 0.0),
            etest_p: coerce_f64(fields.get("etest_p"), 0.0),
            workex: workex_to_bin(fields.get("workex")) == 1,
            cp_level: cp_level_from(fields.get("cp_level")),
            skills: SkillFlags {
                dsa: fields.get("has_dsa").map_or(false, is_truthy),
                web: fields.get("has_web").map_or(false, is_truthy),
                ml: fields.get("has_ml").map_or(false, is_truthy),
                app: fields.get("has_app").map_or(false, is_truthy),
                cloud: fields.get("has_cloud").map_or(false, is_truthy),
            },
            projects: coerce_i64(fields.get("projects"), 0),
            internships: coerce_i64(fields.get("internships"), 0),
            hackathons: coerce_i64(fields.get("hackathons"), 0),
            clubs: coerce_i64(fields.get("clubs"), 0),
            mba_p,
        }
    }

    pub fn workex_bin(&self) -> u8 {
        u8::from(self.workex)
    }
}

/// Real-number coercion. Booleans count as 1/0, strings are trimmed and parsed.
/// Non-finite results are rejected so NaN never reaches the scoring maths.
pub fn coerce_f64(value: Option<&Value>, default: f64) -> f64 {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        Some(Value::Bool(b)) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    };
    parsed.filter(|v| v.is_finite()).unwrap_or(default)
}

/// Integer coercion. JSON floats truncate toward zero; decimal strings such as
/// "2.5" are not integers and fall back to the default.
pub fn coerce_i64(value: Option<&Value>, default: i64) -> i64 {
    match value {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64))
            .unwrap_or(default),
        Some(Value::String(s)) => s.trim().parse::<i64>().unwrap_or(default),
        Some(Value::Bool(b)) => i64::from(*b),
        _ => default,
    }
}

/// Work experience as 0/1 from a bool, a number (non-zero → 1) or a yes-like string.
pub fn workex_to_bin(value: Option<&Value>) -> u8 {
    match value {
        Some(Value::Bool(b)) => u8::from(*b),
        Some(Value::Number(n)) => u8::from(n.as_f64().map_or(false, |f| f != 0.0)),
        Some(Value::String(s)) => {
            let v = s.trim().to_lowercase();
            u8::from(WORKEX_TRUE_VALUES.contains(&v.as_str()))
        }
        _ => 0,
    }
}

/// Truthiness: null, false, zero, and empty strings/arrays/objects are false.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

fn cp_level_from(value: Option<&Value>) -> CpLevel {
    match value {
        None | Some(Value::Null) => CpLevel::None,
        Some(Value::String(s)) => CpLevel::parse(s),
        Some(_) => CpLevel::Unrecognized,
    }
}
