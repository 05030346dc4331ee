pub mod manila_date_time;
