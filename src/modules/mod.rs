pub mod acp_times;

pub mod models {
    pub mod bracket;
    pub mod brevet;
    pub mod controle;
}

pub mod helpers {
    pub mod logging;
    pub mod math;
    pub mod time;
}
