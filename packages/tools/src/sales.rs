//! Sales aggregation.
//!
//! Joins a product price list with a sales record and computes the revenue
//! per product. Both inputs accept either a `name -> value` object or a list
//! of entries:
//!
//! - products: `{"A": 10}` or `[{"title": "A", "price": 10}]`
//! - sales: `{"A": 3}` or `[{"Product": "A", "Quantity": 3}]`

use std::{fmt, path::Path};

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

use crate::{error::ToolError, input::read_text};

#[derive(Debug, Deserialize)]
struct ProductEntry {
    title: String,
    price: Value,
}

#[derive(Debug, Deserialize)]
struct SaleEntry {
    #[serde(rename = "Product")]
    product: String,
    #[serde(rename = "Quantity")]
    quantity: Value,
}

/// Product name to raw JSON value (price or quantity), in file order
pub type ValueTable = IndexMap<String, Value>;

/// A product present in only one of the two inputs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SalesWarning {
    MissingFromSales(String),
    MissingFromProducts(String),
}

impl fmt::Display for SalesWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingFromSales(name) => write!(
                f,
                "Warning: Product '{name}' found in product file but not in sales file."
            ),
            Self::MissingFromProducts(name) => write!(
                f,
                "Warning: Product '{name}' found in sales file but not in products file."
            ),
        }
    }
}

/// Revenue per product plus the warnings raised while joining
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SalesReport {
    pub totals: IndexMap<String, f64>,
    pub warnings: Vec<SalesWarning>,
}

impl SalesReport {
    pub fn total_revenue(&self) -> f64 {
        self.totals.values().sum()
    }

    /// Per-product lines followed by `Total sales cost: <total>`
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (product, revenue) in &self.totals {
            out.push_str(&format!("{product}: {revenue}\n"));
        }
        out.push_str(&format!("Total sales cost: {}\n", self.total_revenue()));
        out
    }
}

fn load_json(path: &Path) -> Result<Value, ToolError> {
    let text = read_text(path)?;
    serde_json::from_str(&text).map_err(|source| ToolError::InvalidJson {
        path: path.to_path_buf(),
        source,
    })
}

/// Normalize product data to a `title -> price` table.
pub fn product_prices(data: Value) -> Result<ValueTable, ToolError> {
    match data {
        Value::Object(map) => Ok(map.into_iter().collect()),
        Value::Array(_) => {
            let entries: Vec<ProductEntry> =
                serde_json::from_value(data).map_err(|e| ToolError::InvalidFormat {
                    what: "product",
                    reason: e.to_string(),
                })?;
            Ok(entries.into_iter().map(|e| (e.title, e.price)).collect())
        }
        _ => Err(ToolError::InvalidFormat {
            what: "product",
            reason: "expected an object or a list".to_string(),
        }),
    }
}

/// Normalize sales data to a `Product -> Quantity` table.
pub fn sales_quantities(data: Value) -> Result<ValueTable, ToolError> {
    match data {
        Value::Object(map) => Ok(map.into_iter().collect()),
        Value::Array(_) => {
            let entries: Vec<SaleEntry> =
                serde_json::from_value(data).map_err(|e| ToolError::InvalidFormat {
                    what: "sales",
                    reason: e.to_string(),
                })?;
            Ok(entries.into_iter().map(|e| (e.product, e.quantity)).collect())
        }
        _ => Err(ToolError::InvalidFormat {
            what: "sales",
            reason: "expected an object or a list".to_string(),
        }),
    }
}

/// Join prices with quantities, in product order.
///
/// Fails on the first product whose price or quantity is not a number. The
/// error keeps the warnings collected up to that product.
pub fn aggregate(products: &ValueTable, sales: &ValueTable) -> Result<SalesReport, ToolError> {
    let mut report = SalesReport::default();

    for (name, price) in products {
        let Some(quantity) = sales.get(name) else {
            report
                .warnings
                .push(SalesWarning::MissingFromSales(name.clone()));
            continue;
        };
        let (Some(price), Some(quantity)) = (price.as_f64(), quantity.as_f64()) else {
            return Err(ToolError::NotANumber {
                product: name.clone(),
                warnings: report.warnings,
            });
        };
        report.totals.insert(name.clone(), price * quantity);
    }

    report.warnings.extend(
        sales
            .keys()
            .filter(|name| !products.contains_key(*name))
            .map(|name| SalesWarning::MissingFromProducts(name.clone())),
    );

    Ok(report)
}

/// Load both files and aggregate them.
pub fn calculate_total_sales(
    product_file: &Path,
    sales_file: &Path,
) -> Result<SalesReport, ToolError> {
    let products = product_prices(load_json(product_file)?)?;
    let sales = sales_quantities(load_json(sales_file)?)?;
    tracing::debug!(
        "Loaded {} products and {} sales entries",
        products.len(),
        sales.len()
    );
    aggregate(&products, &sales)
}
