use crate::types::NewProduct;

/// The fixed sample catalog inserted into an empty store at startup.
pub fn sample_products() -> Vec<NewProduct> {
    vec![
        NewProduct {
            barcode: "1234567890123".to_string(),
            serial: "SN001".to_string(),
            name: "iPhone 15 Pro".to_string(),
            brand: "Apple".to_string(),
            category: "Smartphone".to_string(),
            price: 39900.0,
            description: "Latest iPhone with A17 Pro chip".to_string(),
            stock: 50,
        },
        NewProduct {
            barcode: "2345678901234".to_string(),
            serial: "SN002".to_string(),
            name: "Samsung Galaxy S24".to_string(),
            brand: "Samsung".to_string(),
            category: "Smartphone".to_string(),
            price: 29900.0,
            description: "Flagship Android phone".to_string(),
            stock: 30,
        },
        NewProduct {
            barcode: "3456789012345".to_string(),
            serial: "SN003".to_string(),
            name: "MacBook Air M3".to_string(),
            brand: "Apple".to_string(),
            category: "Laptop".to_string(),
            price: 42900.0,
            description: "Ultra-thin laptop with M3 chip".to_string(),
            stock: 20,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn sample_products_have_distinct_keys() {
        let samples = sample_products();
        assert_eq!(samples.len(), 3);

        let barcodes: HashSet<_> = samples.iter().map(|p| p.barcode.as_str()).collect();
        let serials: HashSet<_> = samples.iter().map(|p| p.serial.as_str()).collect();
        assert_eq!(barcodes.len(), samples.len());
        assert_eq!(serials.len(), samples.len());
    }
}
