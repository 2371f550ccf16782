mod sweep_tests;
