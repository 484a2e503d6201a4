use crate::core::actions::cancellation::{CancelToken, Cancelled, NeverCancel};
use crate::core::actions::colourise_field::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::iteration_field::IterationField;
use crate::core::errors::FractalError;

#[derive(Debug, PartialEq)]
pub enum ColouriseFieldError {
    Cancelled(Cancelled),
    ColourMap(FractalError),
}

impl std::fmt::Display for ColouriseFieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cancelled(c) => write!(f, "{}", c),
            Self::ColourMap(err) => write!(f, "colour map error: {}", err),
        }
    }
}

impl std::error::Error for ColouriseFieldError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Cancelled(c) => Some(c),
            Self::ColourMap(err) => Some(err),
        }
    }
}

/// Maps every sample of `field` through `mapper`, row-major.
pub fn colourise_field<CMap: ColourMap<u32>>(
    field: &IterationField,
    mapper: &CMap,
) -> Result<Vec<Colour>, FractalError> {
    colourise_field_cancelable(field, mapper, &NeverCancel).map_err(|e| match e {
        ColouriseFieldError::ColourMap(err) => err,
        ColouriseFieldError::Cancelled(_) => {
            unreachable!("NeverCancel token should never signal cancellation")
        }
    })
}

pub fn colourise_field_cancelable<CMap, C>(
    field: &IterationField,
    mapper: &CMap,
    cancel: &C,
) -> Result<Vec<Colour>, ColouriseFieldError>
where
    CMap: ColourMap<u32>,
    C: CancelToken,
{
    let mut colours = Vec::with_capacity(field.data().len());

    for (i, &iterations) in field.data().iter().enumerate() {
        cancel.poll(i).map_err(ColouriseFieldError::Cancelled)?;

        colours.push(mapper.map(iterations).map_err(ColouriseFieldError::ColourMap)?);
    }

    Ok(colours)
}
