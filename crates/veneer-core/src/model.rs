//! Model construction: padding and ordered value aggregation.
//!
//! A view model is an ordered list of named, typed slots. Short parameter
//! lists are padded with placeholder slots so every template sees a model of
//! at least [`MIN_MODEL_ARITY`] slots; the template engine binds against the
//! [`ModelAggregate::to_context`] view.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{RenderError, RenderResult};

/// Every model carries at least this many slots.
pub const MIN_MODEL_ARITY: usize = 2;

/// Upper bound on model arity, inherited from the fixed-arity aggregate
/// facility the model descends from. Exceeding it is a call-site
/// misconfiguration, not a runtime condition.
pub const MAX_MODEL_ARITY: usize = 8;

const PLACEHOLDER_PREFIX: &str = "PlaceHolder";

/// Declared type of a template slot.
///
/// `declaration` feeds the artifact header; `default_value` is substituted
/// when a value-typed parameter arrives without a value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeDescriptor {
    Text,
    Integer,
    Float,
    Boolean,
    Timestamp,
    Uuid,
    /// Dynamic/untyped slot; used for padding placeholders.
    Opaque,
    /// Caller-declared type; the name appears verbatim in the header.
    Named(String),
}

impl TypeDescriptor {
    /// Source-level declaration string used in header text.
    pub fn declaration(&self) -> &str {
        match self {
            Self::Text => "String",
            Self::Integer => "i64",
            Self::Float => "f64",
            Self::Boolean => "bool",
            Self::Timestamp => "DateTime",
            Self::Uuid => "Uuid",
            Self::Opaque => "Value",
            Self::Named(name) => name,
        }
    }

    /// True for non-nullable primitive slots, which take their zero value
    /// when supplied without one.
    pub fn is_value_type(&self) -> bool {
        matches!(
            self,
            Self::Integer | Self::Float | Self::Boolean | Self::Timestamp | Self::Uuid
        )
    }

    /// The zero value for this type.
    pub fn default_value(&self) -> Value {
        match self {
            Self::Integer => Value::from(0_i64),
            Self::Float => Value::from(0.0_f64),
            Self::Boolean => Value::from(false),
            Self::Timestamp => Value::from("1970-01-01T00:00:00Z"),
            Self::Uuid => Value::from(uuid::Uuid::nil().to_string()),
            Self::Opaque => Value::Object(Map::new()),
            Self::Text | Self::Named(_) => Value::Null,
        }
    }
}

/// One named, typed value destined for the generated model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateParameter {
    pub name: String,
    pub ty: TypeDescriptor,
    /// `None` means the caller supplied no value.
    pub value: Option<Value>,
}

impl TemplateParameter {
    pub fn new(name: impl Into<String>, ty: TypeDescriptor) -> Self {
        Self {
            name: name.into(),
            ty,
            value: None,
        }
    }

    pub fn with_value(mut self, value: Value) -> Self {
        self.value = Some(value);
        self
    }
}

/// One resolved slot of a built model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSlot {
    pub name: String,
    pub ty: TypeDescriptor,
    pub value: Value,
}

/// Ordered, fixed-arity, heterogeneous model container.
///
/// Built once by [`build_model`]; slots never change afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelAggregate {
    slots: Vec<ModelSlot>,
}

impl ModelAggregate {
    /// Number of slots, padding included. Always within
    /// [`MIN_MODEL_ARITY`]..=[`MAX_MODEL_ARITY`].
    pub fn arity(&self) -> usize {
        self.slots.len()
    }

    pub fn get(&self, index: usize) -> Option<&ModelSlot> {
        self.slots.get(index)
    }

    pub fn get_named(&self, name: &str) -> Option<&ModelSlot> {
        self.slots.iter().find(|s| s.name == name)
    }

    pub fn slots(&self) -> &[ModelSlot] {
        &self.slots
    }

    /// JSON object keyed by slot name, the view handed to the template
    /// engine.
    pub fn to_context(&self) -> Value {
        let mut map = Map::new();
        for slot in &self.slots {
            map.insert(slot.name.clone(), slot.value.clone());
        }
        Value::Object(map)
    }
}

/// Builds the model for a generated view from the supplied parameters.
///
/// Pads to [`MIN_MODEL_ARITY`] with `PlaceHolder{n}` slots, substitutes zero
/// values for value-typed parameters supplied without one, and rejects
/// parameter lists the model container cannot hold. Pure function of its
/// input.
pub fn build_model(params: &[TemplateParameter]) -> RenderResult<ModelAggregate> {
    for (position, param) in params.iter().enumerate() {
        if param.name.is_empty() {
            return Err(RenderError::EmptyParameterName { position });
        }
    }

    let arity = params.len().max(MIN_MODEL_ARITY);
    if arity > MAX_MODEL_ARITY {
        return Err(RenderError::ModelArity {
            arity,
            max: MAX_MODEL_ARITY,
        });
    }

    let mut slots: Vec<ModelSlot> = params
        .iter()
        .map(|param| {
            let supplied = param.value.clone().unwrap_or(Value::Null);
            let value = if supplied.is_null() && param.ty.is_value_type() {
                param.ty.default_value()
            } else {
                supplied
            };
            ModelSlot {
                name: param.name.clone(),
                ty: param.ty.clone(),
                value,
            }
        })
        .collect();

    let mut placeholder = 0;
    while slots.len() < MIN_MODEL_ARITY {
        placeholder += 1;
        slots.push(ModelSlot {
            name: format!("{PLACEHOLDER_PREFIX}{placeholder}"),
            ty: TypeDescriptor::Opaque,
            value: TypeDescriptor::Opaque.default_value(),
        });
    }

    Ok(ModelAggregate { slots })
}
