mod validate_tests;
