/// Integration test target: end-to-end flows against an on-disk database
mod habit_flow;
mod persistence;
