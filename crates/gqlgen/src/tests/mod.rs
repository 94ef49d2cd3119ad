mod document_loader_tests;
