mod classifier_tests;
