// HTTP surface of the service, one submodule per feature

pub mod ping;
