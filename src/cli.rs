/// command line driver: `<metabolites> <reactions> <output.json> [config.json]`
pub mod cli_main;
