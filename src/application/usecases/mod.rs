pub mod send_batch;
