pub mod brand_header;
