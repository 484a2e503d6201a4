use crate::core::data::iteration_field::IterationField;
use crate::core::data::primitive::Primitive;

#[derive(Debug, Clone, PartialEq)]
pub enum FractalOutput {
    Primitives(Vec<Primitive>),
    Field(IterationField),
}

impl FractalOutput {
    #[must_use]
    pub fn primitives(&self) -> Option<&[Primitive]> {
        match self {
            Self::Primitives(primitives) => Some(primitives),
            Self::Field(_) => None,
        }
    }

    #[must_use]
    pub fn field(&self) -> Option<&IterationField> {
        match self {
            Self::Primitives(_) => None,
            Self::Field(field) => Some(field),
        }
    }
}
