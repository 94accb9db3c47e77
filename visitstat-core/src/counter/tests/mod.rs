mod browser_tests;
