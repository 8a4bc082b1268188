pub mod common;

pub mod a001_ad_spend;
pub mod a002_attendance;
pub mod a003_call_center;
pub mod a004_dispatch;
pub mod a005_expenses;
pub mod a006_finished_goods;
pub mod a007_payroll;
pub mod a008_products;
pub mod a009_profit_estimator;
pub mod a010_performance;
pub mod a011_raw_materials;
pub mod a012_staff;
