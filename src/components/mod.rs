pub mod counter_stat;
pub mod home;

pub use counter_stat::CounterStat;
pub use home::Home;
