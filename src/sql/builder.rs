//! Builds parameterized SELECT, INSERT, UPDATE, DELETE for the shop tables.
//! Identifiers are fixed in this module; every caller-supplied value travels as a bound `?N` parameter.

use crate::model::{ContactInput, ProductFilter, ProductInput};
use serde_json::Value;

/// Product listing: one row per (product, category) pair, manufacturer and category names joined in.
const PRODUCT_SELECT: &str = "SELECT p.product_id, p.name, p.description, p.price, p.stock_quantity, \
     m.name AS manufacturer, c.name AS category \
     FROM products p \
     JOIN manufacturers m ON p.manufacturer_id = m.manufacturer_id \
     LEFT JOIN products_categories pc ON p.product_id = pc.product_id \
     LEFT JOIN categories c ON pc.category_id = c.category_id";

#[derive(Debug)]
pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<Value>,
}

impl QueryBuf {
    fn new() -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
        }
    }

    fn push_param(&mut self, v: Value) -> u32 {
        let n = self.params.len() as u32 + 1;
        self.params.push(v);
        n
    }

    /// Bind `v` and return its numbered placeholder.
    fn placeholder(&mut self, v: Value) -> String {
        format!("?{}", self.push_param(v))
    }
}

/// One optional condition on the product listing. Each predicate binds exactly one value.
#[derive(Clone, Debug, PartialEq)]
pub enum ProductPredicate {
    Id(i64),
    MinPrice(f64),
    MaxPrice(f64),
    NameContains(String),
    Category(i64),
}

impl ProductPredicate {
    fn render(&self, q: &mut QueryBuf) -> String {
        match self {
            ProductPredicate::Id(id) => format!("p.product_id = {}", q.placeholder(Value::from(*id))),
            ProductPredicate::MinPrice(min) => format!("p.price >= {}", q.placeholder(Value::from(*min))),
            ProductPredicate::MaxPrice(max) => format!("p.price <= {}", q.placeholder(Value::from(*max))),
            ProductPredicate::NameContains(term) => {
                let pattern = format!("%{}%", escape_like(term));
                format!("p.name LIKE {} ESCAPE '\\'", q.placeholder(Value::String(pattern)))
            }
            ProductPredicate::Category(id) => format!("c.category_id = {}", q.placeholder(Value::from(*id))),
        }
    }
}

/// Predicates for the bounds actually supplied, min before max.
pub fn price_predicates(filter: &ProductFilter) -> Vec<ProductPredicate> {
    let mut out = Vec::with_capacity(2);
    if let Some(min) = filter.min_price {
        out.push(ProductPredicate::MinPrice(min));
    }
    if let Some(max) = filter.max_price {
        out.push(ProductPredicate::MaxPrice(max));
    }
    out
}

/// Escape LIKE wildcards so the term matches as a literal substring.
fn escape_like(term: &str) -> String {
    let mut out = String::with_capacity(term.len());
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

/// Product listing with the given predicates joined by AND. Params bound in predicate order.
pub fn select_products(predicates: &[ProductPredicate]) -> QueryBuf {
    let mut q = QueryBuf::new();
    let where_parts: Vec<String> = predicates.iter().map(|p| p.render(&mut q)).collect();
    let where_clause = if where_parts.is_empty() {
        String::new()
    } else {
        format!(" WHERE {}", where_parts.join(" AND "))
    };
    q.sql = format!("{}{} ORDER BY p.product_id, pc.id", PRODUCT_SELECT, where_clause);
    q
}

pub fn insert_product(input: &ProductInput) -> QueryBuf {
    let mut q = QueryBuf::new();
    let placeholders = product_values(&mut q, input);
    q.sql = format!(
        "INSERT INTO products (manufacturer_id, name, description, price, stock_quantity) VALUES ({})",
        placeholders.join(", ")
    );
    q
}

/// UPDATE replacing all writable product fields.
pub fn update_product(id: i64, input: &ProductInput) -> QueryBuf {
    let mut q = QueryBuf::new();
    let ph = product_values(&mut q, input);
    let id_ph = q.placeholder(Value::from(id));
    q.sql = format!(
        "UPDATE products SET manufacturer_id = {}, name = {}, description = {}, price = {}, stock_quantity = {} \
         WHERE product_id = {}",
        ph[0], ph[1], ph[2], ph[3], ph[4], id_ph
    );
    q
}

fn product_values(q: &mut QueryBuf, input: &ProductInput) -> Vec<String> {
    vec![
        q.placeholder(Value::from(input.manufacturer_id)),
        q.placeholder(Value::String(input.name.clone())),
        q.placeholder(input.description.clone().map(Value::String).unwrap_or(Value::Null)),
        q.placeholder(Value::from(input.price)),
        q.placeholder(Value::from(input.stock_quantity)),
    ]
}

pub fn delete_product(id: i64) -> QueryBuf {
    by_id("DELETE FROM products WHERE product_id = ?1", id)
}

/// Reviews of one product only.
pub fn delete_reviews_for_product(product_id: i64) -> QueryBuf {
    by_id("DELETE FROM reviews WHERE product_id = ?1", product_id)
}

/// Customer with their orders folded into a JSON array text column `Orders`.
/// The password column is deliberately absent.
pub fn select_customer_with_orders(customer_id: i64) -> QueryBuf {
    by_id(
        "SELECT c.customer_id AS Customer_Id, c.name, c.email, c.phone, c.address, \
         COALESCE(JSON_GROUP_ARRAY(JSON_OBJECT('Order_Nr', o.order_id, 'Order_Date', o.order_date)) \
         FILTER (WHERE o.order_id IS NOT NULL), '[]') AS Orders \
         FROM customers c \
         LEFT JOIN orders o ON o.customer_id = c.customer_id \
         WHERE c.customer_id = ?1 \
         GROUP BY c.customer_id",
        customer_id,
    )
}

pub fn update_customer_contact(customer_id: i64, contact: &ContactInput) -> QueryBuf {
    let mut q = QueryBuf::new();
    let email = q.placeholder(Value::String(contact.email.clone()));
    let phone = q.placeholder(Value::String(contact.phone.clone()));
    let address = q.placeholder(Value::String(contact.address.clone()));
    let id = q.placeholder(Value::from(customer_id));
    q.sql = format!(
        "UPDATE customers SET email = {}, phone = {}, address = {} WHERE customer_id = {}",
        email, phone, address, id
    );
    q
}

/// One row per order line with the product name; orders without lines yield one row of nulls.
pub fn select_orders_for_customer(customer_id: i64) -> QueryBuf {
    by_id(
        "SELECT o.order_id AS Order_Nr, o.order_date AS Order_Date, p.name AS Product, \
         op.quantity AS Quantity, op.unit_price AS Unit_Price \
         FROM orders o \
         LEFT JOIN orders_products op ON op.order_id = o.order_id \
         LEFT JOIN products p ON p.product_id = op.product_id \
         WHERE o.customer_id = ?1 \
         ORDER BY o.order_id, op.id",
        customer_id,
    )
}

/// Product count and average price per category.
pub fn product_stats() -> QueryBuf {
    let mut q = QueryBuf::new();
    q.sql = "SELECT c.name AS Category, COUNT(p.product_id) AS Products, AVG(p.price) AS Average_Price \
             FROM categories c \
             LEFT JOIN products_categories pc ON pc.category_id = c.category_id \
             LEFT JOIN products p ON p.product_id = pc.product_id \
             GROUP BY c.category_id \
             ORDER BY c.category_id"
        .into();
    q
}

/// Average rating per product.
pub fn review_stats() -> QueryBuf {
    let mut q = QueryBuf::new();
    q.sql = "SELECT p.name AS Product, AVG(r.rating) AS Average_Score \
             FROM products p \
             LEFT JOIN reviews r ON r.product_id = p.product_id \
             GROUP BY p.product_id \
             ORDER BY p.product_id"
        .into();
    q
}

fn by_id(sql: &str, id: i64) -> QueryBuf {
    let mut q = QueryBuf::new();
    q.push_param(Value::from(id));
    q.sql = sql.to_string();
    q
}
