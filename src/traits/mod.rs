pub mod deployment_data_source;
