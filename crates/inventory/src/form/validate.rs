use super::{Field, FieldError, FieldErrors, FormDraft, FormMode};
use crate::model::{Category, Product, ProductId};

/// Checks every field of `draft` and builds the product it describes.
///
/// Text fields are trimmed, the price is rounded to cents and the quantity must be a whole
/// number. New products get a fresh id; edited ones keep theirs. `sku_taken` says whether
/// another product already holds the SKU.
pub fn validate(draft: &FormDraft, mode: &FormMode, sku_taken: bool) -> Result<Product, FieldErrors> {
    let mut errors = FieldErrors::default();

    let name = required(draft.name.trim(), FieldError::NameRequired);
    let sku = required(draft.sku.trim(), FieldError::SkuRequired).and_then(|sku| {
        if sku_taken {
            Err(FieldError::SkuTaken)
        } else {
            Ok(sku)
        }
    });
    let price = parse_price(&draft.price);
    let quantity = parse_quantity(&draft.quantity);
    let category = parse_category(&draft.category);

    let name = take(&mut errors, Field::Name, name);
    let sku = take(&mut errors, Field::Sku, sku);
    let price = take(&mut errors, Field::Price, price);
    let quantity = take(&mut errors, Field::Quantity, quantity);
    let category = take(&mut errors, Field::Category, category);

    match (name, sku, price, quantity, category) {
        (Some(name), Some(sku), Some(price), Some(quantity), Some(category)) => {
            let id = match mode {
                FormMode::Add => ProductId::generate(),
                FormMode::Edit(id) => id.clone(),
            };
            Ok(Product::new(id, name, sku, price, quantity, category))
        }
        _ => Err(errors),
    }
}

fn take<T>(errors: &mut FieldErrors, field: Field, result: Result<T, FieldError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(error) => {
            errors.insert(field, error);
            None
        }
    }
}

fn required(value: &str, missing: FieldError) -> Result<&str, FieldError> {
    if value.is_empty() {
        Err(missing)
    } else {
        Ok(value)
    }
}

/// A positive amount, rounded to cents. Amounts that round to zero are refused.
fn parse_price(raw: &str) -> Result<f64, FieldError> {
    let raw = required(raw.trim(), FieldError::PriceRequired)?;
    let value: f64 = raw.parse().map_err(|_| FieldError::PriceInvalid)?;
    let rounded = (value * 100.0).round() / 100.0;
    // Huge inputs overflow to infinity once scaled, and JSON cannot store that.
    if rounded.is_finite() && rounded > 0.0 {
        Ok(rounded)
    } else {
        Err(FieldError::PriceInvalid)
    }
}

/// A whole number of units. "5.0" is accepted, "2.5" and "-1" are not.
fn parse_quantity(raw: &str) -> Result<u32, FieldError> {
    let raw = required(raw.trim(), FieldError::QuantityRequired)?;
    // Parsed as f64 so integral notation like "5.0" is accepted; exact up to u32::MAX.
    let value: f64 = raw.parse().map_err(|_| FieldError::QuantityInvalid)?;
    if value.is_finite() && value.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(&value) {
        Ok(value as u32)
    } else {
        Err(FieldError::QuantityInvalid)
    }
}

fn parse_category(raw: &str) -> Result<Category, FieldError> {
    let raw = required(raw.trim(), FieldError::CategoryRequired)?;
    raw.parse().map_err(|_| FieldError::CategoryUnknown)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, sku: &str, price: &str, quantity: &str, category: &str) -> FormDraft {
        FormDraft {
            name: name.to_string(),
            sku: sku.to_string(),
            price: price.to_string(),
            quantity: quantity.to_string(),
            category: category.to_string(),
        }
    }

    fn errors_of(draft: &FormDraft) -> FieldErrors {
        validate(draft, &FormMode::Add, false).unwrap_err()
    }

    #[test]
    fn test_valid_draft() {
        let edit = FormMode::Edit(ProductId::from("p3"));
        let product = validate(&draft("Notebook A5", "NTB-003", "3.75", "5", "stationery"), &edit, false)
            .unwrap();

        assert_eq!(
            product,
            Product::new("p3", "Notebook A5", "NTB-003", 3.75, 5, Category::Stationery)
        );
    }

    #[test]
    fn test_price_rules() {
        assert_eq!(parse_price("12"), Ok(12.0));
        assert_eq!(parse_price(" 0.016 "), Ok(0.02));
        assert_eq!(parse_price("19.999"), Ok(20.0));
        assert_eq!(parse_price(""), Err(FieldError::PriceRequired));
        assert_eq!(parse_price("   "), Err(FieldError::PriceRequired));
        assert_eq!(parse_price("0"), Err(FieldError::PriceInvalid));
        assert_eq!(parse_price("0.004"), Err(FieldError::PriceInvalid));
        assert_eq!(parse_price("-5"), Err(FieldError::PriceInvalid));
        assert_eq!(parse_price("abc"), Err(FieldError::PriceInvalid));
        assert_eq!(parse_price("inf"), Err(FieldError::PriceInvalid));
        assert_eq!(parse_price("NaN"), Err(FieldError::PriceInvalid));
        assert_eq!(parse_price("1e307"), Err(FieldError::PriceInvalid));
    }

    #[test]
    fn test_quantity_rules() {
        assert_eq!(parse_quantity("0"), Ok(0));
        assert_eq!(parse_quantity("5.0"), Ok(5));
        assert_eq!(parse_quantity("4294967295"), Ok(u32::MAX));
        assert_eq!(parse_quantity(""), Err(FieldError::QuantityRequired));
        assert_eq!(parse_quantity("2.5"), Err(FieldError::QuantityInvalid));
        assert_eq!(parse_quantity("-1"), Err(FieldError::QuantityInvalid));
        assert_eq!(parse_quantity("4294967296"), Err(FieldError::QuantityInvalid));
        assert_eq!(parse_quantity("ten"), Err(FieldError::QuantityInvalid));
    }

    #[test]
    fn test_category_rules() {
        assert_eq!(parse_category("Books"), Ok(Category::Books));
        assert_eq!(parse_category(""), Err(FieldError::CategoryRequired));
        assert_eq!(parse_category("Garden"), Err(FieldError::CategoryUnknown));
    }

    #[test]
    fn test_blank_name_is_required() {
        let errors = errors_of(&draft("   ", "X-1", "1", "1", "Home"));

        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(Field::Name), Some(FieldError::NameRequired));
    }

    #[test]
    fn test_taken_sku() {
        let result = validate(&draft("Desk Lamp", "LMP-007", "10", "1", "Home"), &FormMode::Add, true);

        let errors = result.unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(Field::Sku), Some(FieldError::SkuTaken));
        assert_eq!(errors.to_string(), "SKU must be unique");
    }

    #[test]
    fn test_blank_sku_reports_required_not_taken() {
        let result = validate(&draft("Lamp", " ", "10", "1", "Home"), &FormMode::Add, true);

        assert_eq!(result.unwrap_err().get(Field::Sku), Some(FieldError::SkuRequired));
    }

    #[test]
    fn test_all_errors_collected() {
        let errors = errors_of(&draft("", "", "-2", "1.5", "Garden"));

        let collected: Vec<_> = errors.iter().collect();
        assert_eq!(
            collected,
            [
                (Field::Name, FieldError::NameRequired),
                (Field::Sku, FieldError::SkuRequired),
                (Field::Price, FieldError::PriceInvalid),
                (Field::Quantity, FieldError::QuantityInvalid),
                (Field::Category, FieldError::CategoryUnknown),
            ]
        );
    }
}
