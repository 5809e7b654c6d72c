pub mod application {
    pub mod health {
        pub mod check;
    }
    pub mod user {
        pub mod create;
        pub mod delete;
        pub mod get_all;
        pub mod get_by_id;
    }
}

pub mod domain {
    pub mod environment;
    pub mod errors;
    pub mod logger;
    pub mod health {
        pub mod model;
        pub mod services;
        pub mod use_cases {
            pub mod check;
        }
    }
    pub mod user {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod services;
        pub mod validation;
        pub mod value_objects;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_all;
            pub mod get_by_id;
        }
    }
}
