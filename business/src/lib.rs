pub mod application {
    pub mod product {
        pub mod create;
        pub mod delete;
        pub mod get_by_id;
        pub mod list;
        pub mod list_featured;
        pub mod query_executor;
        pub mod update;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod product {
        pub mod criteria;
        pub mod errors;
        pub mod model;
        pub mod pagination;
        pub mod predicate;
        pub mod repository;
        pub mod sort;
        pub mod value_objects;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_by_id;
            pub mod list;
            pub mod list_featured;
            pub mod update;
        }
    }
    pub mod shared {
        pub mod value_objects;
    }
}
