use rust_decimal::Decimal;

use crate::domain::product::{Product, ProductId};
use crate::errors::CatalogError;

/// Lightweight catalog seed used by the bundled demo catalog.
#[derive(Debug, Clone, Copy)]
struct ProductSeed {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    category: &'static str,
    price_cents: i64,
    rating: Option<f64>,
    stock: u32,
}

const DEMO_SEEDS: &[ProductSeed] = &[
    ProductSeed {
        id: "1",
        title: "Fjallraven Foldsack Backpack",
        description: "Fits 15 inch laptops, everyday carry for work and hikes",
        category: "men's clothing",
        price_cents: 10_995,
        rating: Some(3.9),
        stock: 120,
    },
    ProductSeed {
        id: "2",
        title: "Slim Fit Casual T-Shirt",
        description: "Lightweight cotton tshirt with raglan sleeves",
        category: "men's clothing",
        price_cents: 2_230,
        rating: Some(4.1),
        stock: 260,
    },
    ProductSeed {
        id: "3",
        title: "Mens Cotton Jacket",
        description: "Great outerwear jacket for spring, autumn, hiking and camping",
        category: "men's clothing",
        price_cents: 5_599,
        rating: Some(4.7),
        stock: 72,
    },
    ProductSeed {
        id: "4",
        title: "Legends Naga Gold Chain Pendant",
        description: "Dragon station chain necklace inspired by the legend of the naga",
        category: "jewelery",
        price_cents: 69_500,
        rating: Some(4.6),
        stock: 9,
    },
    ProductSeed {
        id: "5",
        title: "Solid Gold Petite Micropave Ring",
        description: "Satisfaction guaranteed ring, designed and sold in the United States",
        category: "jewelery",
        price_cents: 16_800,
        rating: Some(3.9),
        stock: 31,
    },
    ProductSeed {
        id: "6",
        title: "Pierced Owl Rose Gold Plated Earrings",
        description: "Double flared tunnel plug earrings made of stainless steel",
        category: "jewelery",
        price_cents: 1_099,
        rating: Some(1.9),
        stock: 44,
    },
    ProductSeed {
        id: "7",
        title: "WD 2TB Elements Portable Drive",
        description: "USB 3.0 external hard drive, improves PC performance and storage",
        category: "electronics",
        price_cents: 6_400,
        rating: Some(4.8),
        stock: 203,
    },
    ProductSeed {
        id: "8",
        title: "SanDisk SSD Plus 1TB Internal SSD",
        description: "Easy upgrade for faster boot up, shutdown and application load",
        category: "electronics",
        price_cents: 10_900,
        rating: Some(4.8),
        stock: 470,
    },
    ProductSeed {
        id: "9",
        title: "Acoustic Wireless Headphones",
        description: "Over-ear bluetooth headphones with noise isolation and deep bass",
        category: "electronics",
        price_cents: 11_450,
        rating: Some(4.3),
        stock: 88,
    },
    ProductSeed {
        id: "10",
        title: "BIYLACLESEN Snowboard Jacket",
        description: "Warm winter coat for women, stand collar with removable hood",
        category: "women's clothing",
        price_cents: 5_667,
        rating: Some(2.6),
        stock: 53,
    },
    ProductSeed {
        id: "11",
        title: "Opna Short Sleeve Moisture Shirt",
        description: "Breathable women's shirt for training and casual wear",
        category: "women's clothing",
        price_cents: 795,
        rating: Some(4.5),
        stock: 146,
    },
    ProductSeed {
        id: "12",
        title: "Danvouy Casual Cotton Dress",
        description: "V-neck short sleeve dress for spring, summer and autumn",
        category: "women's clothing",
        price_cents: 1_299,
        rating: Some(3.6),
        stock: 91,
    },
];

/// An ordered, read-only collection of products. The catalog is handed to
/// search whole; it is never mutated by the core.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The bundled deterministic demo catalog. Used by the CLI when no
    /// catalog file is given and by scenario tests.
    pub fn demo() -> Self {
        let products = DEMO_SEEDS
            .iter()
            .map(|seed| Product {
                id: ProductId(seed.id.to_owned()),
                title: seed.title.to_owned(),
                description: seed.description.to_owned(),
                category: seed.category.to_owned(),
                price: Decimal::new(seed.price_cents, 2),
                rating: seed.rating,
                stock: seed.stock,
            })
            .collect();

        Self { products }
    }

    /// Decode a catalog from a JSON array of products and validate the
    /// per-product invariants (non-negative price, rating within [0, 5]).
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_str(json)?;

        for product in &products {
            if product.price < Decimal::ZERO {
                return Err(CatalogError::InvalidProduct {
                    id: product.id.0.clone(),
                    reason: "price is negative".to_string(),
                });
            }
            if let Some(rating) = product.rating {
                if !(0.0..=5.0).contains(&rating) {
                    return Err(CatalogError::InvalidProduct {
                        id: product.id.0.clone(),
                        reason: format!("rating {rating} is outside [0, 5]"),
                    });
                }
            }
        }

        Ok(Self { products })
    }

    pub fn to_json(&self) -> Result<String, CatalogError> {
        Ok(serde_json::to_string_pretty(&self.products)?)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn find(&self, product_id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|product| &product.id == product_id)
    }

    /// Distinct category names in first-seen order.
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = Vec::new();
        for product in &self.products {
            if !categories.contains(&product.category) {
                categories.push(product.category.clone());
            }
        }
        categories
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use crate::domain::product::{Product, ProductId};
    use crate::errors::CatalogError;

    use super::Catalog;

    fn product(id: &str, category: &str, price: Decimal, rating: Option<f64>) -> Product {
        Product {
            id: ProductId(id.to_string()),
            title: format!("Product {id}"),
            description: String::new(),
            category: category.to_string(),
            price,
            rating,
            stock: 1,
        }
    }

    #[test]
    fn categories_are_distinct_and_in_first_seen_order() {
        let catalog = Catalog::new(vec![
            product("1", "electronics", Decimal::new(100, 0), None),
            product("2", "jewelery", Decimal::new(200, 0), None),
            product("3", "electronics", Decimal::new(300, 0), None),
        ]);

        assert_eq!(catalog.categories(), vec!["electronics", "jewelery"]);
    }

    #[test]
    fn find_locates_products_by_id() {
        let catalog = Catalog::demo();
        assert!(catalog.find(&ProductId("7".to_string())).is_some());
        assert!(catalog.find(&ProductId("missing".to_string())).is_none());
    }

    #[test]
    fn demo_catalog_covers_all_four_categories() {
        let categories = Catalog::demo().categories();
        for expected in ["men's clothing", "jewelery", "electronics", "women's clothing"] {
            assert!(categories.iter().any(|category| category == expected), "missing {expected}");
        }
    }

    #[test]
    fn json_round_trip_preserves_products() {
        let catalog = Catalog::demo();
        let decoded = Catalog::from_json(&catalog.to_json().expect("encode")).expect("decode");
        assert_eq!(decoded, catalog);
    }

    #[test]
    fn negative_price_is_rejected_at_the_boundary() {
        let json = r#"[{
            "id": "bad",
            "title": "Broken",
            "description": "",
            "category": "electronics",
            "price": "-1.00",
            "rating": null,
            "stock": 0
        }]"#;

        let error = Catalog::from_json(json).expect_err("negative price must fail");
        assert!(matches!(error, CatalogError::InvalidProduct { .. }));
    }

    #[test]
    fn out_of_range_rating_is_rejected_at_the_boundary() {
        let json = r#"[{
            "id": "bad",
            "title": "Broken",
            "description": "",
            "category": "electronics",
            "price": "1.00",
            "rating": 5.2,
            "stock": 0
        }]"#;

        let error = Catalog::from_json(json).expect_err("rating above 5 must fail");
        assert!(matches!(error, CatalogError::InvalidProduct { .. }));
    }
}
