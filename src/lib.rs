pub mod shared {
    pub mod core {
        pub mod primitives;
    }
    pub mod time {
        pub mod clock;
        pub mod convert;
        pub mod countdown;
        pub mod ticker;
    }
    pub mod gesture {
        pub mod carousel;
        pub mod pointer;
    }
    pub mod infrastructure {
        pub mod backend;
        pub mod in_flight;
    }
}

pub mod modules {
    pub mod diaries {
        pub mod errors;
        pub mod core {
            pub mod entry;
            pub mod feed;
            pub mod user;
        }
        pub mod use_cases {
            pub mod list_feed {
                pub mod handler;
                pub mod view;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod publish_entry {
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod hide_entry {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod update_nickname {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod sign_in {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod attach_images {
                pub mod draft;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod preview_images {
                pub mod handler;
            }
            pub mod read_clock {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
    }
}

pub mod shell;
