mod property {
    mod csv;
    mod extract;
    mod validate;
}
