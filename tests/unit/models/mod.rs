mod category_tests;
mod schedule_tests;
