pub mod application {
    pub mod diagnostic {
        pub mod run;
    }
}

pub mod domain {
    pub mod environment;
    pub mod logger;
    pub mod diagnostic {
        pub mod errors;
        pub mod model;
        pub mod report;
        pub mod services;
        pub mod use_cases {
            pub mod run;
        }
    }
}
