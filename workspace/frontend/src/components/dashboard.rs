mod chart;
mod notice;
mod scenarios;
mod stats;
mod table;
mod view;

pub use view::Dashboard;
