pub mod config;

pub mod modules {
    pub mod events {
        pub mod adapters {
            pub mod outbound {
                pub mod firestore;
                pub mod in_memory;
            }
        }
        pub mod core {
            pub mod event;
        }
        pub mod ports;
        pub mod use_cases {
            pub mod add_event {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_event {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_events {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
    }
}

pub mod shell;
