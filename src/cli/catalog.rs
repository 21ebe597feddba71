use crate::tables::build_catalog_table;

pub fn catalog() {
    println!("{}", build_catalog_table());
}
