use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::Coupon;

/// Request payload for creating a coupon
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCouponRequest {
    #[validate(length(
        min = 1,
        max = 64,
        message = "El código debe tener entre 1 y 64 caracteres"
    ))]
    pub codigo: String,

    /// Discount percentage; must be 30, 50 or 100.
    pub tipo_descuento: i32,

    #[validate(range(min = 1, message = "Los usos máximos deben ser positivos"))]
    pub usos_maximos: Option<i32>,
}

impl CreateCouponRequest {
    pub const ALLOWED_DISCOUNTS: [i32; 3] = [30, 50, 100];

    pub fn validate_discount(&self) -> std::result::Result<(), String> {
        if Self::ALLOWED_DISCOUNTS.contains(&self.tipo_descuento) {
            Ok(())
        } else {
            Err("El tipo de descuento debe ser 30, 50 o 100".to_string())
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ValidateCouponRequest {
    pub codigo: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CouponValidity {
    pub valido: bool,
    pub tipo_descuento: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CouponListResponse {
    pub coupons: Vec<Coupon>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(tipo_descuento: i32) -> CreateCouponRequest {
        CreateCouponRequest {
            codigo: "MITAD".to_string(),
            tipo_descuento,
            usos_maximos: Some(10),
        }
    }

    #[test]
    fn only_whitelisted_discounts_are_accepted() {
        for pct in CreateCouponRequest::ALLOWED_DISCOUNTS {
            assert!(request(pct).validate_discount().is_ok());
        }

        for pct in [0, 25, 99, 101, -50] {
            assert!(request(pct).validate_discount().is_err());
        }
    }

    #[test]
    fn empty_code_fails_validation() {
        let mut req = request(50);
        req.codigo = String::new();
        assert!(req.validate().is_err());
    }

    #[test]
    fn non_positive_usage_cap_fails_validation() {
        let mut req = request(50);
        req.usos_maximos = Some(0);
        assert!(req.validate().is_err());

        req.usos_maximos = None;
        assert!(req.validate().is_ok());
    }
}
