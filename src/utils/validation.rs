//! Utilidades de validación
//!
//! Validadores propios para los campos que `validator` no cubre. Se usan
//! desde las requests con `#[validate(custom = "...")]`.

use rust_decimal::Decimal;
use serde::Serialize;
use validator::ValidationError;

/// Validar que un string no esté vacío ni sea sólo espacios
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_blank");
        error.message = Some("El campo no puede estar vacío".into());
        return Err(error);
    }
    Ok(())
}

/// Validar que un valor sea no negativo
pub fn validate_non_negative<T: PartialOrd + std::fmt::Display + num_traits::Zero + Serialize>(
    value: T,
) -> Result<(), ValidationError> {
    if value < T::zero() {
        let mut error = ValidationError::new("non_negative");
        error.add_param("value".into(), &value);
        error.message = Some("El valor no puede ser negativo".into());
        return Err(error);
    }
    Ok(())
}

/// Máximo que admiten las columnas NUMERIC(10, 2)
// 9_999_999_999 = 0x2_540B_E3FF (lo, mid, hi), escala 2 => 99_999_999.99
pub const MAX_DECIMAL_AMOUNT: Decimal = Decimal::from_parts(0x540B_E3FF, 0x2, 0, false, 2);

/// Cantidades Decimal (horas, kilómetros, costes): no negativas y dentro de la columna
pub fn validate_decimal_amount(value: &Decimal) -> Result<(), ValidationError> {
    validate_non_negative(*value)?;
    if *value > MAX_DECIMAL_AMOUNT {
        let mut error = ValidationError::new("max_amount");
        error.add_param("value".into(), value);
        error.add_param("max".into(), &MAX_DECIMAL_AMOUNT);
        error.message = Some("El valor supera el máximo permitido".into());
        return Err(error);
    }
    Ok(())
}

/// Validar rango de coordenadas GPS
pub fn validate_coordinates(lat: f64, lng: f64) -> Result<(), ValidationError> {
    if !(-90.0..=90.0).contains(&lat) {
        let mut error = ValidationError::new("latitude");
        error.add_param("value".into(), &lat);
        error.add_param("range".into(), &"-90.0 to 90.0".to_string());
        return Err(error);
    }

    if !(-180.0..=180.0).contains(&lng) {
        let mut error = ValidationError::new("longitude");
        error.add_param("value".into(), &lng);
        error.add_param("range".into(), &"-180.0 to 180.0".to_string());
        return Err(error);
    }

    Ok(())
}

/// Validar coordenadas en formato "lat,lng"
pub fn validate_coordinates_str(value: &str) -> Result<(), ValidationError> {
    let parsed = value
        .split_once(',')
        .and_then(|(lat, lng)| Some((lat.trim().parse::<f64>().ok()?, lng.trim().parse::<f64>().ok()?)));

    match parsed {
        Some((lat, lng)) => validate_coordinates(lat, lng),
        None => {
            let mut error = ValidationError::new("coordinates");
            error.add_param("value".into(), &value.to_string());
            error.add_param("format".into(), &"lat,lng".to_string());
            Err(error)
        }
    }
}
