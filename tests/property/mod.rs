mod closing;
mod filtering;
