pub mod a2s;
