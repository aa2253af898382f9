pub mod application {
    pub mod product {
        pub mod get_catalog;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod cart {
        pub mod model;
    }
    pub mod product {
        pub mod catalog;
        pub mod errors;
        pub mod model;
        pub mod value_objects;
        pub mod use_cases {
            pub mod get_catalog;
        }
    }
}
