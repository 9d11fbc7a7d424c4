pub mod catalog;
pub mod job_record;
pub mod job_type;
pub mod line_item;
pub mod technician;
