pub mod application {
    pub mod assistant {
        pub mod suggest_reply;
        pub mod summarize;
        pub mod translate;
    }
}

pub mod domain {
    pub mod logger;
    pub mod assistant {
        pub mod errors;
        pub mod model;
        pub mod services;
        pub mod use_cases {
            pub mod suggest_reply;
            pub mod summarize;
            pub mod translate;
        }
    }
}
