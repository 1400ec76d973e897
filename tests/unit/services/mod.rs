mod countdown_tests;
mod distance_tests;
