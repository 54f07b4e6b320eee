pub mod application {
    pub mod auth {
        pub mod login;
    }
    pub mod cart {
        pub mod add_line;
        pub mod clear;
        pub mod get;
        pub mod remove_line;
    }
    pub mod history {
        pub mod get_all;
    }
    pub mod product {
        pub mod resolve;
    }
    pub mod scan {
        pub mod controller;
    }
    pub mod store {
        pub mod browse;
        pub mod get_all;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod value_objects;
    }
    pub mod auth {
        pub mod errors;
        pub mod gateway;
        pub mod model;
        pub mod use_cases {
            pub mod login;
        }
    }
    pub mod cart {
        pub mod errors;
        pub mod gateway;
        pub mod model;
        pub mod use_cases {
            pub mod add_line;
            pub mod clear;
            pub mod get;
            pub mod remove_line;
        }
    }
    pub mod history {
        pub mod errors;
        pub mod gateway;
        pub mod model;
        pub mod use_cases {
            pub mod get_all;
        }
    }
    pub mod product {
        pub mod catalog;
        pub mod errors;
        pub mod model;
        pub mod use_cases {
            pub mod resolve;
        }
    }
    pub mod scan {
        pub mod camera;
        pub mod errors;
        pub mod events;
        pub mod model;
        pub mod payload;
    }
    pub mod store {
        pub mod errors;
        pub mod gateway;
        pub mod model;
        pub mod use_cases {
            pub mod browse;
            pub mod get_all;
        }
    }
}
