/*
[INPUT]:  Parsed CLI command and a ready TaskStore
[OUTPUT]: Terminal front-end flows
[POS]:    CLI layer - binary-only modules
[UPDATE]: When adding subcommands
*/

pub mod init;
pub mod interactive;
pub mod render;
