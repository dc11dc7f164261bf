mod ownership_tests;
